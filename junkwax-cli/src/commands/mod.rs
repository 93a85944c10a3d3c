pub(crate) mod export;
pub(crate) mod ids;
pub(crate) mod ingest;
pub(crate) mod normalize;
pub(crate) mod validate;
