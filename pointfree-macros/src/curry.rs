//! Expansion of the `curry!` macro.
//!
//! Two input forms are accepted:
//!
//! 1. A closure, whose parameter list gives the arity: `curry!(|a, b| body)`
//! 2. A function path followed by an integer arity: `curry!(function, 2)`
//!
//! Both expand to a chain of `move` closures taking one argument each. The
//! wrapped function and every captured argument live behind an `Rc`, so the
//! curried closure and each partial application can be called many times:
//!
//! ```text
//! {
//!     let __pointfree_function = Rc::new(function);
//!     move |__pointfree_argument_0| {
//!         let __pointfree_function = Rc::clone(&__pointfree_function);
//!         let __pointfree_argument_0 = Rc::new(__pointfree_argument_0);
//!         move |__pointfree_argument_1| {
//!             __pointfree_function(
//!                 Rc::unwrap_or_clone(Rc::clone(&__pointfree_argument_0)),
//!                 __pointfree_argument_1,
//!             )
//!         }
//!     }
//! }
//! ```

use proc_macro2::{Ident, Span, TokenStream};
use quote::{format_ident, quote};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Expr, ExprLit, Lit, Token};

const MINIMUM_ARITY: usize = 2;

/// A parsed `curry!` invocation: the callee tokens and how many arguments it takes.
pub struct CurryInput {
    pub function: TokenStream,
    pub arity: usize,
}

pub fn expand(input: TokenStream) -> TokenStream {
    match parse(input) {
        Ok(CurryInput { function, arity }) => nested_closures(arity, &function),
        Err(error) => error.to_compile_error(),
    }
}

pub fn parse(input: TokenStream) -> syn::Result<CurryInput> {
    let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
    let expressions = syn::parse::Parser::parse2(parser, input)?;
    let mut expressions = expressions.into_iter();

    match (expressions.next(), expressions.next(), expressions.next()) {
        (Some(Expr::Closure(closure)), None, None) => {
            let arity = closure.inputs.len();
            if arity < MINIMUM_ARITY {
                return Err(too_few_arguments(closure.span()));
            }
            Ok(CurryInput {
                function: quote! { #closure },
                arity,
            })
        }
        (Some(Expr::Path(path)), None, None) => Err(syn::Error::new(
            path.span(),
            "curry! with a function name requires an arity: curry!(function_name, 2)",
        )),
        (Some(Expr::Path(path)), Some(arity), None) => {
            let arity = parse_arity(arity)?;
            if arity < MINIMUM_ARITY {
                return Err(too_few_arguments(path.span()));
            }
            Ok(CurryInput {
                function: quote! { #path },
                arity,
            })
        }
        (Some(other), Some(_), None) => Err(syn::Error::new(
            other.span(),
            "expected a function name or path",
        )),
        (Some(other), None, None) => Err(syn::Error::new(
            other.span(),
            "curry! requires a closure or a function name with an arity",
        )),
        _ => Err(syn::Error::new(
            Span::call_site(),
            "curry! requires a closure or a function name with an arity",
        )),
    }
}

fn parse_arity(expression: Expr) -> syn::Result<usize> {
    match expression {
        Expr::Lit(ExprLit {
            lit: Lit::Int(literal),
            ..
        }) => literal.base10_parse::<usize>(),
        other => Err(syn::Error::new(
            other.span(),
            "curry! expected an integer literal for the arity",
        )),
    }
}

fn too_few_arguments(span: Span) -> syn::Error {
    syn::Error::new(
        span,
        "curry! requires a function with at least 2 arguments",
    )
}

fn nested_closures(arity: usize, function: &TokenStream) -> TokenStream {
    let arguments: Vec<Ident> = (0..arity)
        .map(|index| format_ident!("__pointfree_argument_{}", index))
        .collect();

    let last = arity - 1;
    let call_arguments = arguments.iter().enumerate().map(|(index, argument)| {
        if index < last {
            quote! { ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&#argument)) }
        } else {
            quote! { #argument }
        }
    });

    let mut body = quote! { __pointfree_function(#(#call_arguments),*) };

    for (index, argument) in arguments.iter().enumerate().rev() {
        body = if index == last {
            quote! { move |#argument| { #body } }
        } else {
            let captured = &arguments[..index];
            quote! {
                move |#argument| {
                    let __pointfree_function = ::std::rc::Rc::clone(&__pointfree_function);
                    #(let #captured = ::std::rc::Rc::clone(&#captured);)*
                    let #argument = ::std::rc::Rc::new(#argument);
                    #body
                }
            }
        };
    }

    quote! {
        {
            let __pointfree_function = ::std::rc::Rc::new(#function);
            #body
        }
    }
}
