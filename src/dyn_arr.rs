mod array;
mod growth;
mod inner;


pub use array::DynArr;
pub use array::Iter;
