use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, Ident, LitInt, Token,
};

extern crate proc_macro;

struct FixtureTest {
    subcommand: Ident,
    index: LitInt,
}

impl Parse for FixtureTest {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let subcommand = input.parse()?;
        input.parse::<Token![,]>()?;
        let index = input.parse()?;
        Ok(FixtureTest { subcommand, index })
    }
}

/// `fixture_test!(dot_product, 2)` expands to a test `dot_product_2` calling
/// `fixture_test("dot-product", 2)`.
#[proc_macro]
pub fn fixture_test(tokens: TokenStream) -> TokenStream {
    let FixtureTest { subcommand, index } = parse_macro_input!(tokens as FixtureTest);
    let subcommand_name = subcommand.to_string().replace('_', "-");
    let test_function_name = Ident::new(&format!("{}_{}", subcommand, index), Span::call_site());
    let tokens = quote! {
        #[test]
        fn #test_function_name () {
            fixture_test( #subcommand_name, #index );
        }
    };
    tokens.into()
}
