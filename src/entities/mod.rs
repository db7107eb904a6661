// Entity Models
// Following Rich Hickey's philosophy: "Identity persists, values change"
//
// A franchise is the identity; each incarnation (name + codes over a year
// range) is one of its values. Aliases and logos hang off the codes.

pub mod alias;
pub mod logo;
pub mod team;

pub use alias::{AliasMatch, AliasTable, NameAlias};
pub use logo::{LogoEntry, LogoTable};
pub use team::{TeamRecord, TeamRegistry};
