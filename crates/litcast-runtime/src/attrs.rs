bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Attributes: u32 {
        /// Coerce literal arguments even when every parameter is `Opaque`.
        const NUMERIC    = 0b0001;
        /// One of the six comparison built-ins; replaced by an adapter.
        const RELATIONAL = 0b0010;
        /// Produced by the wrapper factory; never wrapped a second time.
        const COERCING   = 0b0100;
    }
}

impl Default for Attributes {
    fn default() -> Self { Attributes::empty() }
}
