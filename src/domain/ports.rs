/// What the helper layer imports from its sibling package.
pub trait Sibling {
    fn hello(&self) -> String;
    fn version(&self) -> &str;
}
