use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, LitStr};

// ============================================================================
// #[derive(Message)]
// ============================================================================

/// Derive macro for dispatchable message types.
///
/// Implements the `Message` marker trait and `HasMessageName`, with the
/// message name defaulting to the type's identifier.
///
/// # Usage
///
/// Default name (the type identifier):
/// ```ignore
/// #[derive(Message)]
/// struct OrderPlaced {
///     order_id: String,
/// }
///
/// assert_eq!(OrderPlaced::MESSAGE_NAME, "OrderPlaced");
/// ```
///
/// With an explicit name:
/// ```ignore
/// #[derive(Message)]
/// #[message(name = "shop.order.placed")]
/// struct OrderPlaced {
///     order_id: String,
/// }
///
/// assert_eq!(OrderPlaced::MESSAGE_NAME, "shop.order.placed");
/// ```
#[proc_macro_derive(Message, attributes(message))]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = match message_name(&input) {
        Ok(name) => name,
        Err(e) => return e.to_compile_error().into(),
    };

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::buswire::Message for #ident #ty_generics #where_clause {}

        impl #impl_generics ::buswire::HasMessageName for #ident #ty_generics #where_clause {
            const MESSAGE_NAME: &'static str = #name;
        }
    };

    TokenStream::from(expanded)
}

/// Resolve the message name: `#[message(name = "...")]` if present,
/// otherwise the type identifier.
fn message_name(input: &DeriveInput) -> syn::Result<String> {
    let mut name = None;

    for attr in &input.attrs {
        if !attr.path().is_ident("message") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unsupported message attribute; expected `name = \"...\"`"))
            }
        })?;
    }

    Ok(name.unwrap_or_else(|| input.ident.to_string()))
}
