//! Procedural macros for the aoc-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro for automatically registering solvers with the plugin system
///
/// This macro generates the necessary code to register a solver with the inventory
/// system, allowing it to be discovered and registered automatically.
///
/// # Attributes
///
/// - `day`: Required. The day number (1-25)
/// - `variant`: Optional. `"primary"` (default) or `"golf"`
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not implemented,
/// you will get a clear compile-time error:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
///   |
///   | struct YourSolver;
///   |        ^^^^^^^^^^ unsatisfied trait bound
///   |
/// help: the trait `Solver` is not implemented for `YourSolver`
/// ```
///
/// # Example
///
/// ```ignore
/// use aoc_solver::{AocParser, AutoRegisterSolver, Solver};
///
/// #[derive(AutoRegisterSolver)]
/// #[aoc(day = 1)]
/// struct Day01;
///
/// #[derive(AutoRegisterSolver)]
/// #[aoc(day = 1, variant = "golf")]
/// struct Day01Golf;
/// ```
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let aoc_attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("aoc"))
        .ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                "AutoRegisterSolver derive macro requires #[aoc(...)] attribute",
            )
        })?;

    let mut day: Option<u8> = None;
    let mut variant = quote! { ::aoc_solver::Variant::Primary };

    aoc_attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            match meta.value()?.parse()? {
                Lit::Int(lit_int) => {
                    let value: u8 = lit_int.base10_parse()?;
                    if !(1..=25).contains(&value) {
                        return Err(meta.error("day must be between 1 and 25"));
                    }
                    day = Some(value);
                }
                other => return Err(syn::Error::new_spanned(other, "day must be an integer")),
            }
        } else if meta.path.is_ident("variant") {
            match meta.value()?.parse()? {
                Lit::Str(lit_str) => {
                    variant = match lit_str.value().as_str() {
                        "primary" => quote! { ::aoc_solver::Variant::Primary },
                        "golf" => quote! { ::aoc_solver::Variant::Golf },
                        _ => {
                            return Err(syn::Error::new_spanned(
                                lit_str,
                                "variant must be \"primary\" or \"golf\"",
                            ));
                        }
                    };
                }
                other => {
                    return Err(syn::Error::new_spanned(other, "variant must be a string"));
                }
            }
        } else {
            return Err(meta.error("unknown aoc attribute, expected `day` or `variant`"));
        }
        Ok(())
    })?;

    let day = day.ok_or_else(|| syn::Error::new_spanned(aoc_attr, "Missing required 'day' attribute"))?;

    Ok(quote! {
        // Compile-time check that the type implements Solver trait
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                day: #day,
                variant: #variant,
                solver: &#name,
            }
        }
    })
}
