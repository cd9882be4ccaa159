mod record;

pub use record::JobRecord;
