pub mod owner_id;
