use derive_more::Constructor;

#[derive(Constructor, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Person {
    pub name: &'static str,
    pub age: u32,
}

pub fn people() -> Vec<Person> {
    vec![
        Person::new("Mickey", 30),
        Person::new("Minnie", 27),
        Person::new("Goofy", 22),
        Person::new("Donald", 32),
    ]
}
