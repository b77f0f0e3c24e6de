mod meta;

pub use meta::InMemoryMetaRepository;
