use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// The `*` product of two arrays.
    ///
    /// - vector `*` vector: dot product, a scalar
    /// - matrix `*` vector: a vector
    /// - vector `*` matrix: a vector
    /// - matrix `*` matrix: a matrix
    ///
    /// The inner dimensions must agree.
    pub fn eval_matmul(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        let lshape = left.shape(line)?;
        let rshape = right.shape(line)?;

        match (lshape.as_slice(), rshape.as_slice()) {
            ([k_l], [k_r]) if k_l == k_r => dot_1d_1d(left, right, line),
            ([_, k_l], [k_r]) if k_l == k_r => mat_2d_vec_1d(left, right, line),
            ([k_l], [k_r, n]) if k_l == k_r => vec_1d_mat_2d(left, right, *n, line),
            ([_, k_l], [k_r, n]) if k_l == k_r => mat_2d_2d(left, right, *n, line),
            _ => Err(RuntimeError::ShapeMismatch { left: lshape,
                                                   right: rshape,
                                                   line }),
        }
    }
}

pub fn mul_values(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    Context::eval_scalar_op(BinaryOperator::Mul, left, right, line)
}

pub fn add_values(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    Context::eval_scalar_op(BinaryOperator::Add, left, right, line)
}

pub fn dot_1d_1d(left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
    let left_vector = left.as_vec(line)?;
    let right_vector = right.as_vec(line)?;

    reduce_sum(pairwise_mul(left_vector, right_vector, line), line)
}

pub fn mat_2d_vec_1d(matrix: &Value, vector: &Value, line: usize) -> EvalResult<Value> {
    let rows = matrix.as_vec(line)?;
    let x = vector.as_vec(line)?;

    let mut out = Vec::with_capacity(rows.len());
    for row in rows.iter() {
        out.push(reduce_sum(pairwise_mul(row.as_vec(line)?, x, line), line)?);
    }

    Ok(Value::from(out))
}

pub fn vec_1d_mat_2d(vector: &Value, matrix: &Value, columns: usize, line: usize) -> EvalResult<Value> {
    let x = vector.as_vec(line)?;
    let rows = matrix.as_vec(line)?;

    let mut out = Vec::with_capacity(columns);
    for col in 0..columns {
        let col_items = x.iter().zip(rows.iter()).map(|(xi, row)| {
                                                     let row = row.as_vec(line)?;
                                                     mul_values(xi, &row[col], line)
                                                 });
        out.push(reduce_sum(col_items, line)?);
    }

    Ok(Value::from(out))
}

pub fn mat_2d_2d(left: &Value, right: &Value, columns: usize, line: usize) -> EvalResult<Value> {
    let left_rows = left.as_vec(line)?;
    let right_rows = right.as_vec(line)?;

    let mut out_rows = Vec::with_capacity(left_rows.len());
    for row in left_rows.iter() {
        let rv = row.as_vec(line)?;

        let mut out_row = Vec::with_capacity(columns);
        for col in 0..columns {
            let col_items = rv.iter().zip(right_rows.iter()).map(|(a, right_row)| {
                                                               let right_row = right_row.as_vec(line)?;
                                                               mul_values(a, &right_row[col], line)
                                                           });
            out_row.push(reduce_sum(col_items, line)?);
        }

        out_rows.push(Value::from(out_row));
    }

    Ok(Value::from(out_rows))
}

/// Reduces a sequence of numeric values using addition.
///
/// The first element becomes the initial accumulator. If the iterator is empty
/// the result is `Value::Integer(0)`.
///
/// # Example
/// ```
/// use matlang::interpreter::{evaluator::binary::matmul::reduce_sum, value::core::Value};
///
/// let values = vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)];
///
/// let r = reduce_sum(values.into_iter().map(Ok), 1).unwrap();
/// assert_eq!(r, Value::Integer(6));
/// ```
pub fn reduce_sum<I>(items: I, line: usize) -> EvalResult<Value>
    where I: Iterator<Item = EvalResult<Value>>
{
    let mut acc = None;

    for v in items {
        let v = v?;
        acc = Some(match acc {
                       Some(existing) => add_values(&existing, &v, line)?,
                       None => v,
                   });
    }

    Ok(acc.unwrap_or(Value::Integer(0)))
}

/// Multiplies corresponding elements from two slices of equal length.
pub fn pairwise_mul<'a>(a: &'a [Value],
                        b: &'a [Value],
                        line: usize)
                        -> impl Iterator<Item = EvalResult<Value>> + 'a {
    a.iter()
     .zip(b.iter())
     .map(move |(x, y)| mul_values(x, y, line))
}
