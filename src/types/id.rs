pub type Id = u64;
