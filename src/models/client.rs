/// A person record with identity and contact fields.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// One search result row: a client paired with one of its phone numbers,
/// or with no phone at all.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct ClientMatch {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

/// Field-level changes for `ClientStore::update_client`.
///
/// `None` leaves a field untouched; `Some` applies the value, including an
/// explicit empty string. A present `phones` list replaces the client's
/// whole phone set rather than merging into it.
#[derive(Debug, Default, Clone)]
pub struct ClientUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phones: Option<Vec<String>>,
}

/// Criteria for `ClientStore::find_clients`. Present fields are OR-ed
/// together; absent fields do not participate in the match.
#[derive(Debug, Default, Clone)]
pub struct ClientFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
