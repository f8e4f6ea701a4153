mod active_value;
mod seed;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives SeedableInitializer trait implementation for table iden enums
///
/// This macro wires a table definition enum to its create-table statement,
/// optional index statements and seed-data function.
#[proc_macro_derive(SeedableInitializer, attributes(seedable))]
pub fn derive_seedable_initializer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match seed::expand_derive_seedable_initializer(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives UnseedableInitializer trait implementation for table iden enums
///
/// Same wiring as [`SeedableInitializer`] but without seed data.
#[proc_macro_derive(UnseedableInitializer, attributes(unseedable))]
pub fn derive_unseedable_initializer(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match seed::expand_derive_unseedable_initializer(input) {
        Ok(ts) => ts.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derives IntoActiveValue trait implementation for enums used with sea-orm.
#[proc_macro_derive(IntoActiveValue)]
pub fn derive_into_active_value(input: TokenStream) -> TokenStream {
    active_value::derive_into_active_value(input)
}
