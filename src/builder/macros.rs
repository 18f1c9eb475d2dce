//! Macros for declaring a domain's named ordinals.

/// Declare named [`State`](crate::State) or [`Event`](crate::Event)
/// constants on a unit struct, plus a reverse lookup for diagnostics.
///
/// # Example
///
/// ```
/// use statetable::{ordinals, Event, State};
///
/// ordinals! {
///     pub struct PaymentState: State {
///         INIT = 0,
///         AUTH = 1,
///         CAPTURED = 2,
///     }
/// }
///
/// ordinals! {
///     pub struct PaymentEvent: Event {
///         NONE = 0,
///         AUTH = 1,
///     }
/// }
///
/// assert_eq!(PaymentState::AUTH, State(1));
/// assert_eq!(PaymentEvent::NONE, Event::NONE);
/// assert_eq!(PaymentState::name_of(State(2)), Some("CAPTURED"));
/// assert_eq!(PaymentState::name_of(State(9)), None);
/// ```
#[macro_export]
macro_rules! ordinals {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $kind:ident {
            $(
                $(#[$item_meta:meta])*
                $item:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug)]
        $vis struct $name;

        #[allow(dead_code)]
        impl $name {
            $(
                $(#[$item_meta])*
                pub const $item: $crate::$kind = $crate::$kind($value);
            )*

            /// Every declared ordinal with its name, in declaration order.
            pub const ALL: &'static [(&'static str, $crate::$kind)] = &[
                $((stringify!($item), $crate::$kind($value))),*
            ];

            /// Declared name of an ordinal.
            pub fn name_of(ordinal: $crate::$kind) -> Option<&'static str> {
                Self::ALL
                    .iter()
                    .find(|(_, candidate)| *candidate == ordinal)
                    .map(|(name, _)| *name)
            }
        }
    };
}
