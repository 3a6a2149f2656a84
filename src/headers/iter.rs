use super::{HeaderMap, HeaderName, HeaderValue, map::HeaderField};

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = <Iter<'a> as Iterator>::Item;

    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over header name and value pair, see [`HeaderMap::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    iter: std::slice::Iter<'a, HeaderField>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(map: &'a HeaderMap) -> Self {
        Self {
            iter: map.fields().iter(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a HeaderValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|field| (&field.name, &field.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Iterator over every value of a single header name, see [`HeaderMap::get_all`].
#[derive(Debug)]
pub struct GetAll<'a> {
    iter: std::slice::Iter<'a, HeaderField>,
    name: Box<str>,
}

impl<'a> GetAll<'a> {
    pub(crate) fn new(map: &'a HeaderMap, name: &str) -> Self {
        Self {
            iter: map.fields().iter(),
            name: name.into(),
        }
    }
}

impl<'a> Iterator for GetAll<'a> {
    type Item = &'a HeaderValue;

    fn next(&mut self) -> Option<Self::Item> {
        let name = &self.name;
        self.iter
            .find(|field| field.name.eq_ignore_ascii_case(name))
            .map(|field| &field.value)
    }
}

/// Owning iterator over header name and value pair.
#[derive(Debug)]
pub struct IntoIter {
    iter: std::vec::IntoIter<HeaderField>,
}

impl IntoIter {
    pub(crate) fn new(fields: Vec<HeaderField>) -> Self {
        Self {
            iter: fields.into_iter(),
        }
    }
}

impl Iterator for IntoIter {
    type Item = (HeaderName, HeaderValue);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|field| (field.name, field.value))
    }
}
