//! Example that demonstrates the exact usage shown in the package documentation.
//!
//! This shows how to use the `intlist` package for materializing a list in one call and for
//! lazily iterating a list one value at a time.

fn main() {
    println!("=== IntList README Example ===");

    let values = intlist::parse("4,6,10...15").unwrap();
    assert_eq!(values, vec![4, 6, 10, 11, 12, 13, 14, 15]);

    println!("Values: {values:?}");
    println!("As intlist: {}", intlist::emit(values));

    let mut iter = intlist::Iter::new("1...1000,1030...1014,2000");
    assert_eq!(iter.status(), &intlist::Status::Ready);

    let mut total: i64 = 0;
    while let Some(value) = iter.next() {
        total += value;
    }

    println!("Total of '1...1000,1030...1014,2000': {total}");

    println!("README example completed successfully!");
}
