pub mod embedding;
pub mod language_model;
pub mod storage;
pub mod vector_source;

pub use embedding::IEmbeddingProvider;
pub use language_model::ILanguageModel;
pub use storage::IProgressStore;
pub use vector_source::IVectorSource;
