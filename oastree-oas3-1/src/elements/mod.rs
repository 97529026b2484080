pub mod callback;
pub mod components;
pub mod contact;
pub mod discriminator;
pub mod discriminator_mapping;
pub mod encoding;
pub mod encoding_headers;
pub mod example;
pub mod external_documentation;
pub mod header;
pub mod info;
pub mod license;
pub mod link;
pub mod media_type;
pub mod oauth_flow;
pub mod oauth_flows;
pub mod openapi;
pub mod operation;
pub mod openapi3_1;
pub mod parameter;
pub mod path_item;
pub mod paths;
pub mod reference;
pub mod request_body;
pub mod response;
pub mod responses;
pub mod schema;
pub mod security_requirement;
pub mod security_scheme;
pub mod server;
pub mod server_variable;
pub mod tag;
pub mod xml;

pub use callback::*;
pub use components::*;
pub use contact::*;
pub use discriminator::*;
pub use discriminator_mapping::*;
pub use encoding::*;
pub use encoding_headers::*;
pub use example::*;
pub use external_documentation::*;
pub use header::*;
pub use info::*;
pub use license::*;
pub use link::*;
pub use media_type::*;
pub use oauth_flow::*;
pub use oauth_flows::*;
pub use openapi::*;
pub use operation::*;
pub use openapi3_1::*;
pub use parameter::*;
pub use path_item::*;
pub use paths::*;
pub use reference::*;
pub use request_body::*;
pub use response::*;
pub use responses::*;
pub use schema::*;
pub use security_requirement::*;
pub use security_scheme::*;
pub use server::*;
pub use server_variable::*;
pub use tag::*;
pub use xml::*;
