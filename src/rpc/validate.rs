use super::{AnswerResponse, CallKind, FacadeError};

/// A transported response only counts as a success when it carries an answer.
pub fn validate(kind: CallKind, response: AnswerResponse) -> Result<String, FacadeError> {
    if response.answer.is_empty() {
        return Err(FacadeError::empty_answer(kind, response.answer));
    }
    Ok(response.answer)
}
