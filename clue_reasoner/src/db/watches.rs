/*!
Watch lists, for each atom.

Each (non-unit) clause watches two of its literals, which are always the first two literals of the clause.
So long as neither watched literal is false, the clause is neither asserting nor conflicting, and so the clause need only be examined when some watched literal becomes false.
*/

use crate::{
    db::ClauseKey,
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

/// Clauses watching each literal of some atom.
#[derive(Default)]
pub struct WatchDB {
    /// Clauses watching the atom with positive polarity.
    pub positive: Vec<ClauseKey>,

    /// Clauses watching the atom with negative polarity.
    pub negative: Vec<ClauseKey>,
}

#[derive(Default)]
pub struct Watches {
    pub dbs: Vec<WatchDB>,
}

impl Watches {
    /// Ensures a watch database exists for every atom up to and including `atom`.
    pub fn ensure(&mut self, atom: Atom) {
        while self.dbs.len() <= atom as usize {
            self.dbs.push(WatchDB::default());
        }
    }

    /// Notes `key` watches `literal`.
    pub fn watch(&mut self, literal: CLiteral, key: ClauseKey) {
        self.list_mut(literal).push(key);
    }

    /// The clauses watching `literal`.
    ///
    /// The atom of `literal` is required to have a watch database.
    pub fn list_mut(&mut self, literal: CLiteral) -> &mut Vec<ClauseKey> {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &mut db.positive,
            false => &mut db.negative,
        }
    }
}
