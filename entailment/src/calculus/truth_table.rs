use crate::calculus::{
    evaluation::{Evaluable, EvaluationContext},
    Symbol,
};

/// One row of a truth table: a total assignment over its columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment<'a> {
    columns: &'a [Symbol],
    row: usize,
}

impl<'a> Assignment<'a> {
    pub fn new(columns: &'a [Symbol], row: usize) -> Self {
        Self { columns, row }
    }

    pub fn row(&self) -> usize {
        self.row
    }
}

impl EvaluationContext for Assignment<'_> {
    fn eval(&self, symbol: &Symbol) -> bool {
        self.columns
            .iter()
            .enumerate()
            // If the row number is represented in binary,
            // its 1s represent a unique set of symbols
            // for that row that should be true,
            // and 0s -- that should be false.
            // We filter only true ones.
            .filter(|(i, _)| (self.row.checked_shr(*i as u32).unwrap_or(0) & 1) == 1)
            .any(|(_, s)| s == symbol)
    }
}

/// Every total assignment over `columns`, in binary counting order.
///
/// Yields, for each row, whether all `sentences` hold in it.
#[derive(Debug, Clone)]
pub struct TruthTable<'a, E: Evaluable> {
    curr_row: usize,
    columns: &'a [Symbol],
    sentences: &'a [E],
    size: usize,
}

impl<'a, E: Evaluable> TruthTable<'a, E> {
    /// `None` if the table has more rows than `usize` can count.
    pub fn new(columns: &'a [Symbol], sentences: &'a [E]) -> Option<Self> {
        let size = u32::try_from(columns.len())
            .ok()
            .and_then(|n| 2usize.checked_pow(n))?;

        Some(Self {
            curr_row: 0,
            columns,
            sentences,
            size,
        })
    }

    pub fn only_true_rows(self) -> FilteredTruthTable<'a, E, true> {
        FilteredTruthTable { inner_iter: self }
    }

    pub fn only_false_rows(self) -> FilteredTruthTable<'a, E, false> {
        FilteredTruthTable { inner_iter: self }
    }

    pub fn curr_row(&self) -> usize {
        self.curr_row
    }

    pub fn columns(&self) -> &[Symbol] {
        self.columns
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl<E: Evaluable> Iterator for TruthTable<'_, E> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr_row < self.size {
            let row = Assignment::new(self.columns, self.curr_row);
            let ret = self.sentences.iter().all(|s| s.check(&row));
            self.curr_row += 1;
            Some(ret)
        } else {
            None
        }
    }
}

/// Row numbers of a [TruthTable] whose value is `F`.
#[derive(Debug, Clone)]
pub struct FilteredTruthTable<'a, E: Evaluable, const F: bool> {
    inner_iter: TruthTable<'a, E>,
}

impl<E: Evaluable, const F: bool> Iterator for FilteredTruthTable<'_, E, F> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner_iter.next() {
                Some(v) if v == F => return Some(self.inner_iter.curr_row - 1),
                Some(_) => continue,
                None => return None,
            }
        }
    }
}
