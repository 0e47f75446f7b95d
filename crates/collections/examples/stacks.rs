use strata_collections::{containers_match, find_index, swap_values, Container, Stack};

// This example walks through the stack and the container capability: pushing and popping, indexed
// reads, and comparing a stack against a plain vector.
fn main() {
    env_logger::init();

    let mut strings = Stack::new();
    for name in ["Albert", "Andrew", "Betty", "Jacob"] {
        strings.push(String::from(name));
    }
    let top = strings.pop().expect("stack is not empty");
    println!("popped {top}, {} left", strings.count());

    let mut doubles = Stack::<f64>::with_capacity(3);
    doubles.push(2.5);
    doubles.push(42.0);
    doubles.push(1_000_000.0);
    doubles.pop().expect("stack is not empty");
    println!("doubles: {:?}", doubles.as_slice());

    // Reads past the end are reported, not clamped.
    match doubles.at(7) {
        Ok(value) => println!("doubles[7] = {value}"),
        Err(error) => println!("doubles[7]: {error}"),
    }

    // A stack always matches itself, and can be compared against any container of the same item
    // type. Comparing `strings` with `doubles` does not compile.
    println!("doubles match doubles: {}", containers_match(&doubles, &doubles));
    let greek = vec![
        String::from("Alpha"),
        String::from("Beta"),
        String::from("Theta"),
    ];
    println!("strings match greek: {}", containers_match(&strings, &greek));

    let mut copy = greek.clone();
    Container::append(&mut copy, String::from("Iota"));
    println!("Iota is at {:?}", find_index(&copy, &String::from("Iota")));

    let (mut a, mut b) = (3, 4);
    swap_values(&mut a, &mut b);
    println!("swapped: a = {a}, b = {b}");

    // Drain what is left, top first.
    while let Ok(name) = strings.pop() {
        println!("{name}");
    }
}
