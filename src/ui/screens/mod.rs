pub(crate) mod chat;
pub(crate) mod dashboard;
pub(crate) mod expenses;
