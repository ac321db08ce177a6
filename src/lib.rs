//! # chainlist
//!
//! A generic singly-linked list with indexed insertion, removal,
//! replacement, lookup and forward iteration.
//!
//! - [`LinkedList`]: the container. It owns a chain of [`Node`]s and a
//!   cached size.
//! - [`List`]: the list capability set, implemented by `LinkedList`.
//! - [`Iter`]: a forward cursor with `has_next` / `try_next`, also usable as
//!   a std [`Iterator`].
//! - [`Element`]: what a stored value must provide. Values that report
//!   themselves absent (`None` for `Option<U>`) are refused.
//! - [`script`]: a TOML-driven runner over `LinkedList<Option<i64>>`, used by
//!   the `chainlist` binary, which logs through [`logger`].
//!
//! ```
//! use chainlist::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.add(5)?;
//! list.add(7)?;
//! list.add_at(1, 9)?;
//! assert_eq!(list.to_vec(), vec![5, 9, 7]);
//! # Ok::<(), chainlist::ListError>(())
//! ```

pub mod element;
pub mod error;
pub mod iter;
pub mod list;
pub mod logger;
pub mod node;
pub mod script;
pub mod traits;

pub use element::Element;
pub use error::{ListError, Result};
pub use iter::Iter;
pub use list::{IntoIter, LinkedList};
pub use node::{Link, Node};
pub use traits::List;
