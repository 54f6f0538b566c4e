mod elastic_contact_repository;
mod traits;

pub use elastic_contact_repository::{
    contact_index_definition, match_all_query, match_name_query, multi_field_query,
    ElasticContactRepository, SEARCH_FIELDS,
};
pub use traits::ContactRepository;
