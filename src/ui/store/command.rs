use crate::tracker::Application;

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    LoadRecords,
    CreateRecord(Application),
    UpdateRecord { id: i64, application: Application },
    /// `index` is the table row the id was taken from
    DeleteRecord { id: i64, index: usize },
}
