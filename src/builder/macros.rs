//! Macros for naming state indices.

/// Declare an enum whose variants name consecutive state indices.
///
/// Variants are numbered from zero in declaration order, so they line up
/// with the indices `add_state` hands out when states are registered in the
/// same order.
///
/// # Example
///
/// ```
/// use tinystate::core::StateId;
/// use tinystate::state_ids;
///
/// state_ids! {
///     pub enum Pump {
///         Idle,
///         Priming,
///         Running,
///     }
/// }
///
/// assert_eq!(Pump::Priming.id(), StateId::new(1));
/// assert_eq!(Pump::Running.name(), "Running");
/// assert_eq!(Pump::from_id(StateId::new(0)), Some(Pump::Idle));
/// assert_eq!(Pump::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_ids {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        #[repr(u8)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in index order.
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            pub const fn id(self) -> $crate::core::StateId {
                $crate::core::StateId::new(self as u8)
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            pub fn from_id(id: $crate::core::StateId) -> ::core::option::Option<Self> {
                Self::ALL.iter().copied().find(|state| state.id() == id)
            }
        }

        impl ::core::convert::From<$name> for $crate::core::StateId {
            fn from(state: $name) -> Self {
                state.id()
            }
        }
    };
}
