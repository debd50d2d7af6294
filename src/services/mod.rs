pub mod civic;
pub mod database;
pub mod message;

pub use civic::CivicData;
pub use database::MongoDb;
pub use message::MessageFile;
