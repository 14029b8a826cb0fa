/// Problems found while reading a view, reported together so a single
/// compile shows all of them.
#[derive(Debug, Default)]
pub(crate) struct ErrorSet(Option<syn::Error>);

impl ErrorSet {
    pub(crate) fn push(&mut self, err: syn::Error) {
        match &mut self.0 {
            Some(acc) => acc.combine(err),
            None => self.0 = Some(err),
        }
    }

    /// `value` if nothing was pushed, otherwise every collected error.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.0 {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
