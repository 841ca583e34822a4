mod make_shelf;

pub use make_shelf::MakeShelf;
