use derive_new::new;

/// A single step of an edit script turning sequence `a` into sequence `b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal { .. })
    }
}

/// Common shape of the line diff algorithms.
///
/// `compute_shortest_edit` runs the search that measures the shortest edit
/// script (the last Myers frontier, the LCS table), and `diff` turns it into
/// an edit script ordered by position in both sequences.
///
/// Whenever several shortest scripts exist, `diff` keeps equal elements first,
/// then prefers deleting from `a` over inserting from `b`.
pub trait DiffAlgorithm<'d, T> {
    type Trace;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn diff(&self) -> Vec<Edit<T>>;

    /// Number of inserted plus deleted elements in the edit script.
    fn edit_distance(&self) -> usize {
        self.diff().iter().filter(|edit| edit.is_change()).count()
    }
}

/// Rounds kept in memory at once while replaying the backward search.
const CHECKPOINT_SPAN: usize = 32;

/// Myers' O(ND) shortest edit script.
///
/// The search runs backwards from the end of both sequences: after round `d`
/// the frontier holds, for every diagonal `k = x - y` within `d` of the end
/// diagonal, the smallest `x` from which the end is at most `d` edits away.
/// The script is then built front to back. Equal elements are kept, and a
/// deletion is taken whenever it still leaves a shortest path.
///
/// The walk needs the rounds in the opposite order to the one they are
/// computed in. Only a logarithmic number of checkpoints is kept and the
/// rounds between them are recomputed, so memory stays at `O(D log D)`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

/// One round of the backward search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    round: usize,
    // indexed by `k - (n - m) + round + 1`; unreachable diagonals are `None`
    reach: Vec<Option<usize>>,
}

impl Frontier {
    pub fn round(&self) -> usize {
        self.round
    }

    /// Number of diagonals stored for this round.
    pub fn width(&self) -> usize {
        self.reach.len()
    }

    /// Reach on the diagonal `offset` away from the end diagonal.
    fn get(&self, offset: isize) -> Option<usize> {
        usize::try_from(offset + self.round as isize + 1)
            .ok()
            .and_then(|idx| self.reach.get(idx).copied().flatten())
    }
}

impl<'d, T: Eq + Clone> DiffAlgorithm<'d, T> for MyersDiff<'d, T> {
    type Trace = Frontier;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let mut frontier = self.first_round();
        while !self.reaches_origin(&frontier) {
            frontier = self.next_round(&frontier);
        }

        tracing::trace!(rounds = frontier.round + 1, "myers search reached the origin");
        frontier
    }

    fn diff(&self) -> Vec<Edit<T>> {
        let distance = self.compute_shortest_edit().round();
        let mut walk = Walk::new(self.a, self.b, self.end_diagonal());

        if distance > 0 {
            self.replay(self.first_round(), distance, &mut walk);
        }

        walk.finish()
    }

    fn edit_distance(&self) -> usize {
        self.compute_shortest_edit().round()
    }
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    fn end_diagonal(&self) -> isize {
        self.a.len() as isize - self.b.len() as isize
    }

    /// Follows equal elements backwards from `x` on diagonal `k`.
    fn snake_back(&self, mut x: usize, k: isize) -> usize {
        let mut y = (x as isize - k) as usize;
        while x > 0 && y > 0 && self.a[x - 1] == self.b[y - 1] {
            x -= 1;
            y -= 1;
        }
        x
    }

    fn first_round(&self) -> Frontier {
        let x = self.snake_back(self.a.len(), self.end_diagonal());

        Frontier {
            round: 0,
            reach: vec![None, Some(x), None],
        }
    }

    fn next_round(&self, prev: &Frontier) -> Frontier {
        let round = prev.round + 1;
        let r = round as isize;
        let mut reach = vec![None; 2 * round + 3];

        for offset in (-r..=r).step_by(2) {
            let k = self.end_diagonal() + offset;

            // undo a deletion (coming from k+1) or an insertion (coming from k-1)
            let from_del = prev.get(offset + 1).and_then(|x| x.checked_sub(1));
            let from_ins = prev.get(offset - 1).filter(|&x| x as isize - k >= 0);

            if let Some(x) = from_del.into_iter().chain(from_ins).min() {
                reach[(offset + r + 1) as usize] = Some(self.snake_back(x, k));
            }
        }

        Frontier { round, reach }
    }

    fn reaches_origin(&self, frontier: &Frontier) -> bool {
        frontier.get(-self.end_diagonal()) == Some(0)
    }

    /// Feeds rounds `start.round()..end` to `walk`, latest round first.
    fn replay(&self, start: Frontier, end: usize, walk: &mut Walk<'_, T>) {
        if end - start.round <= CHECKPOINT_SPAN {
            let mut rounds = Vec::with_capacity(end - start.round);
            let mut frontier = start;
            loop {
                let next = (frontier.round + 1 < end).then(|| self.next_round(&frontier));
                rounds.push(frontier);
                match next {
                    Some(next) => frontier = next,
                    None => break,
                }
            }

            rounds.iter().rev().for_each(|frontier| walk.step(frontier));
            return;
        }

        let middle = start.round + (end - start.round) / 2;
        let mut checkpoint = start.clone();
        while checkpoint.round < middle {
            checkpoint = self.next_round(&checkpoint);
        }

        self.replay(checkpoint, end, walk);
        self.replay(start, middle, walk);
    }
}

/// Builds the edit script front to back, one edit per replayed round.
struct Walk<'d, T> {
    a: &'d [T],
    b: &'d [T],
    end_diagonal: isize,
    x: usize,
    y: usize,
    edits: Vec<Edit<T>>,
}

impl<'d, T: Eq + Clone> Walk<'d, T> {
    fn new(a: &'d [T], b: &'d [T], end_diagonal: isize) -> Self {
        Walk {
            a,
            b,
            end_diagonal,
            x: 0,
            y: 0,
            edits: Vec::with_capacity(a.len() + b.len()),
        }
    }

    fn snake(&mut self) {
        while self.x < self.a.len() && self.y < self.b.len() && self.a[self.x] == self.b[self.y] {
            self.edits.push(Edit::Equal {
                value: self.a[self.x].clone(),
            });
            self.x += 1;
            self.y += 1;
        }
    }

    /// Takes the next edit. `frontier` is the round describing what is left
    /// after it, so a deletion is shortest iff `(x + 1, y)` lies within it.
    fn step(&mut self, frontier: &Frontier) {
        self.snake();

        if self.x < self.a.len() {
            let offset = (self.x + 1) as isize - self.y as isize - self.end_diagonal;
            let deletion_is_shortest = frontier
                .get(offset)
                .is_some_and(|reach| reach <= self.x + 1);

            if self.y == self.b.len() || deletion_is_shortest {
                self.edits.push(Edit::Delete {
                    value: self.a[self.x].clone(),
                });
                self.x += 1;
                return;
            }
        }

        self.edits.push(Edit::Insert {
            value: self.b[self.y].clone(),
        });
        self.y += 1;
    }

    fn finish(mut self) -> Vec<Edit<T>> {
        self.snake();
        self.edits
    }
}
