//! Macros for declaring state and event identities.

/// Declare a fieldless enum usable as a state or event identity.
///
/// Derives `Clone, Copy, PartialEq, Eq, Hash, Debug` and adds an `ALL`
/// constant listing the variants in declaration order plus a `name()`
/// method.
///
/// # Example
///
/// ```
/// use switchyard::fsm_enum;
///
/// fsm_enum! {
///     pub enum Light {
///         Red,
///         Yellow,
///         Green,
///     }
/// }
///
/// assert_eq!(Light::ALL.len(), 3);
/// assert_eq!(Light::Yellow.name(), "Yellow");
/// ```
#[macro_export]
macro_rules! fsm_enum {
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
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$($name::$variant),*];

            /// Variant name for display and logging.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{EventId, StateId};

    fsm_enum! {
        enum Stage {
            Start,
            Middle,
            End,
        }
    }

    fn is_state_id<T: StateId>(_: &T) -> bool {
        true
    }

    fn is_event_id<V: EventId>(_: &V) -> bool {
        true
    }

    #[test]
    fn fsm_enum_generates_identity() {
        assert!(is_state_id(&Stage::Start));
        assert!(is_event_id(&Stage::End));
        assert_eq!(Stage::ALL, &[Stage::Start, Stage::Middle, Stage::End]);
        assert_eq!(Stage::Middle.name(), "Middle");
    }

    #[test]
    fn fsm_enum_supports_visibility() {
        fsm_enum! {
            pub enum Public {
                A,
                B,
            }
        }

        assert_eq!(Public::ALL.len(), 2);
        assert_eq!(Public::B.name(), "B");
    }
}
