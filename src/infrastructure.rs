pub mod db {
    pub mod baas;
}

pub mod utils {
    pub mod valid_id;
}
