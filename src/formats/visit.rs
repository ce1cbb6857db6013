pub(crate) trait ImageVisitor {
    fn visit(&mut self, x: usize, y: usize);
}

/// Visit every pixel of a `width` x `height` image, row by row
#[inline(never)]
pub(crate) fn visit<R>(width: usize, height: usize, mut visitor: R)
where
    R: ImageVisitor,
{
    for y in 0..height {
        for x in 0..width {
            visitor.visit(x, y);
        }
    }
}

/// Visit every horizontal pixel pair, `x` is always the even column of the pair
#[inline(never)]
pub(crate) fn visit_pairs<R>(width: usize, height: usize, mut visitor: R)
where
    R: ImageVisitor,
{
    assert_eq!(width % 2, 0);

    for y in 0..height {
        for x in (0..width).step_by(2) {
            visitor.visit(x, y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Collect<'a>(&'a mut Vec<(usize, usize)>);

    impl ImageVisitor for Collect<'_> {
        fn visit(&mut self, x: usize, y: usize) {
            self.0.push((x, y));
        }
    }

    #[test]
    fn pairs_visit_even_columns_only() {
        let mut got = vec![];

        visit_pairs(4, 2, Collect(&mut got));

        assert_eq!(got, [(0, 0), (2, 0), (0, 1), (2, 1)]);
    }

    #[test]
    fn pixels_visit_everything() {
        let mut got = vec![];

        visit(3, 1, Collect(&mut got));

        assert_eq!(got, [(0, 0), (1, 0), (2, 0)]);
    }

    #[test]
    #[should_panic]
    fn pairs_reject_odd_width() {
        visit_pairs(3, 1, Collect(&mut vec![]));
    }
}
