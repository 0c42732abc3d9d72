/// Answers collected by the registration wizard, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub admission_no: String,
    pub passout_year: i32,
    pub profile_file_id: String,
    pub telegram_id: i64,
}
