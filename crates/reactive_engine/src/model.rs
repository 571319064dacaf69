//! Model-level aggregation of per-constraint codes.
//!
//! The model behaves like one more constraint whose code at each event is
//! folded from every constraint's code at that event:
//!
//! 1. any `10` (violated) gives `10`,
//! 2. otherwise any `11` (fulfilled) gives `11`,
//! 3. otherwise any `00` gives `00`,
//! 4. otherwise `01`, including when there are no constraints at all.

use reactive_foundation::{Error, ErrorKind, EvaluationCode, Result};

/// Folds the codes of every constraint at one event.
#[must_use]
pub fn aggregate<I>(codes: I) -> EvaluationCode
where
    I: IntoIterator<Item = EvaluationCode>,
{
    let mut fulfilled = false;
    let mut inactive = false;
    for code in codes {
        match code {
            EvaluationCode::Violated => return EvaluationCode::Violated,
            EvaluationCode::Fulfilled => fulfilled = true,
            EvaluationCode::Inactive => inactive = true,
            EvaluationCode::InactiveTarget => {}
        }
    }
    if fulfilled {
        EvaluationCode::Fulfilled
    } else if inactive {
        EvaluationCode::Inactive
    } else {
        EvaluationCode::InactiveTarget
    }
}

/// Builds the model row of one trace from the rows of every constraint.
///
/// # Errors
/// Returns [`ErrorKind::TraceLengthMismatch`] if the rows differ in length.
pub fn model_row<R>(rows: &[R]) -> Result<Vec<EvaluationCode>>
where
    R: AsRef<[EvaluationCode]>,
{
    let Some(len) = rows.first().map(|r| r.as_ref().len()) else {
        return Ok(Vec::new());
    };
    if let Some(bad) = rows.iter().find(|r| r.as_ref().len() != len) {
        return Err(Error::new(ErrorKind::TraceLengthMismatch {
            expected: len,
            actual: bad.as_ref().len(),
        }));
    }
    Ok((0..len)
        .map(|event| aggregate(rows.iter().map(|r| r.as_ref()[event])))
        .collect())
}
