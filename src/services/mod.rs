// vidmark services
// Services provide everything around the store: persistence, filtering, video metadata, seed data, settings.

pub mod filter_engine;
pub mod persistence_worker;
pub mod seed_data;
pub mod settings_engine;
pub mod storage_adapter;
pub mod video_metadata;
