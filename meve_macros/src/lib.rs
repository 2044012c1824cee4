use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, FnArg, ItemFn, PatType, ReturnType, Type};

fn formatted_arg_error_msg(arg_pos: usize, fn_name: &str) -> String {
    format!("Expected argument {} of {} to be f64", arg_pos, fn_name)
}

fn is_f64(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident == "f64")
            .unwrap_or(false),
        _ => false,
    }
}

/// Turns `fn name(a: f64, b: f64) -> f64 { .. }` into a registry callback
/// `fn name(args: &[f64]) -> f64` and emits `NAME_ARITY` next to it.
///
/// Arguments are bound positionally, so `args[0]` is the leftmost operand.
#[proc_macro_attribute]
pub fn scalar_fn(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    let attrs = &input.attrs;
    let vis = &input.vis;
    let fn_name = &input.sig.ident;
    let fn_body = &input.block;

    match &input.sig.output {
        ReturnType::Type(_, ty) if is_f64(ty) => {}
        output => {
            return syn::Error::new_spanned(output, "scalar_fn must return f64")
                .to_compile_error()
                .into();
        }
    }

    let mut arg_extractions = Vec::new();

    for (i, arg) in input.sig.inputs.iter().enumerate() {
        let FnArg::Typed(PatType { pat, ty, .. }) = arg else {
            return syn::Error::new_spanned(arg, "scalar_fn cannot take self")
                .to_compile_error()
                .into();
        };

        let arg_name = match **pat {
            syn::Pat::Ident(ref ident) => &ident.ident,
            _ => {
                return syn::Error::new_spanned(pat, "Unsupported pattern")
                    .to_compile_error()
                    .into();
            }
        };

        if !is_f64(ty) {
            let err_msg = formatted_arg_error_msg(i, &fn_name.to_string());
            return syn::Error::new_spanned(ty, err_msg)
                .to_compile_error()
                .into();
        }

        arg_extractions.push(quote! {
            let #arg_name: f64 = args[#i];
        });
    }

    let args_len = arg_extractions.len();
    let arity_name = format_ident!("{}_ARITY", fn_name.to_string().to_uppercase());

    let expanded = quote! {
        #(#attrs)*
        #vis fn #fn_name(args: &[f64]) -> f64 {
            debug_assert_eq!(args.len(), #args_len);

            #(#arg_extractions)*

            #fn_body
        }

        #vis const #arity_name: usize = #args_len;
    };

    TokenStream::from(expanded)
}
