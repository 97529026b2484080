pub mod callback_builder;
pub mod components_builder;
pub mod contact_builder;
pub mod discriminator_builder;
pub mod discriminator_mapping_builder;
pub mod encoding_builder;
pub mod encoding_headers_builder;
pub mod example_builder;
pub mod external_documentation_builder;
pub mod header_builder;
pub mod info_builder;
pub mod license_builder;
pub mod link_builder;
pub mod media_type_builder;
pub mod oauth_flow_builder;
pub mod oauth_flows_builder;
pub mod openapi_builder;
pub mod openapi3_1_builder;
pub mod operation_builder;
pub mod parameter_builder;
pub mod paths_builder;
pub mod path_item_builder;
pub mod reference_builder;
pub mod request_body_builder;
pub mod response_builder;
pub mod responses_builder;
pub mod schema_builder;
pub mod security_requirement_builder;
pub mod security_scheme_builder;
pub mod server_builder;
pub mod server_variable_builder;
pub mod tag_builder;
pub mod xml_builder;

pub use callback_builder::*;
pub use components_builder::*;
pub use contact_builder::*;
pub use discriminator_builder::*;
pub use discriminator_mapping_builder::*;
pub use encoding_builder::*;
pub use encoding_headers_builder::*;
pub use example_builder::*;
pub use external_documentation_builder::*;
pub use header_builder::*;
pub use info_builder::*;
pub use license_builder::*;
pub use link_builder::*;
pub use media_type_builder::*;
pub use oauth_flow_builder::*;
pub use oauth_flows_builder::*;
pub use openapi_builder::*;
pub use openapi3_1_builder::*;
pub use operation_builder::*;
pub use parameter_builder::*;
pub use paths_builder::*;
pub use path_item_builder::*;
pub use reference_builder::*;
pub use request_body_builder::*;
pub use response_builder::*;
pub use responses_builder::*;
pub use schema_builder::*;
pub use security_requirement_builder::*;
pub use security_scheme_builder::*;
pub use server_builder::*;
pub use server_variable_builder::*;
pub use tag_builder::*;
pub use xml_builder::*;
