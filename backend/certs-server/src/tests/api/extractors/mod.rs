mod owner_id;
