//! The display surface seam

/// A label-like element that shows text
pub trait DisplaySurface: Send + 'static {
    /// Replace the shown text
    fn set_text(&mut self, text: &str);
}

/// Adapts a closure into a [`DisplaySurface`]
pub struct DisplayFn<F>(pub F);

impl<F> DisplaySurface for DisplayFn<F>
where
    F: FnMut(&str) + Send + 'static,
{
    fn set_text(&mut self, text: &str) {
        (self.0)(text)
    }
}

impl<D: DisplaySurface + ?Sized> DisplaySurface for Box<D> {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }
}
