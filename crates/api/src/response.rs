use serde::Serialize;

/// `{ "data": T }`, the envelope every JSON success body uses.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
