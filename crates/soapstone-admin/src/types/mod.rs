//! Child records shared across catalog modules: open-ended attribute
//! lists, entity selectors, and the `name`/`id`/attrs info triples.

mod attr;
mod info;
mod selector;

pub use attr::{Attr, AttrList};
pub use info::{AccountInfo, CosCountInfo, DomainInfo, ServerInfo};
pub use selector::{
    AccountBy, AccountSelector, CosBy, CosSelector, DataSourceBy, DomainBy, DomainSelector,
    ServerBy, ServerSelector,
};
