/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

pub trait CodedError {
    fn component(&self) -> &'static str;

    fn code(&self) -> &'static str;

    fn format_description(&self) -> String;

    fn typed_source(&self) -> Option<&(dyn CodedError + Send + Sync)>;

    fn format_code_and_description(&self) -> String {
        format!("[{}] {}", self.code(), self.format_description())
    }
}

impl fmt::Debug for dyn CodedError + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for dyn CodedError + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.typed_source() {
            Some(source) => write!(
                f,
                "[{}] {}\nCause: \n\t {:?}",
                self.code(),
                self.format_description(),
                source as &dyn CodedError
            ),
            None => write!(f, "{}", self.format_code_and_description()),
        }
    }
}

// ***USAGE NOTE***: `typed_source` must be the last field of a variant, after any payload fields.
#[macro_export]
macro_rules! coded_error {
    ( $vis: vis $name:ident(component = $component: literal, prefix = $prefix: literal) { $(
        $variant: ident (
            $number: literal,
            $description: literal
            $(, $payload_name: ident : $payload_type: ty )*
            $(, ( typed_source : $typed_source: ty ) )?
        ),
    )*}) => {
        #[derive(Clone)]
        $vis enum $name {
            $(
                $variant { $(typed_source: $typed_source, )? $($payload_name: $payload_type, )* },
            )*
        }

        impl $name {
            const _VALIDATE_NUMBERS: () = {
                #[deny(unreachable_patterns)] // fail to compile if any Numbers are the same
                match 0 {
                    $(
                        $number => (),
                    )*
                    _ => (),
               }
           };
        }

        impl $crate::CodedError for $name {
            fn component(&self) -> &'static str {
                &$component
            }

            fn code(&self) -> &'static str {
                match self {
                    $(
                        Self::$variant { .. } => & concat!($prefix, stringify!($number)),
                    )*
                }
            }

            fn format_description(&self) -> String {
                match self {
                    $(
                        Self::$variant { $( $payload_name, )* .. } => format!($description),
                    )*
                }
            }

            fn typed_source(&self) -> Option<&(dyn $crate::CodedError + Send + Sync)> {
                let error = match self {
                    $(
                        $(Self::$variant { typed_source, .. } => {
                            let typed_source: &$typed_source = typed_source;
                            Some(typed_source as &(dyn $crate::CodedError + Send + Sync))
                        })?
                    )*
                    #[allow(unreachable_patterns)]
                    _ => None
                };
                error
            }
        }

        impl ::std::fmt::Debug for $name {
           fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(self as &dyn $crate::CodedError, f)
            }
        }

        impl ::std::fmt::Display for $name {
           fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self as &dyn $crate::CodedError, f)
            }
        }

        impl ::std::error::Error for $name {}
    };
}
