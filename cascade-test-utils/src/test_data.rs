// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Plant {
    pub name: String,
    pub height: u32,
}

/// Heterogeneous payload used by operator tests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl TestData {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person(person) => &person.name,
            Self::Animal(animal) => &animal.name,
            Self::Plant(plant) => &plant.name,
        }
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(p) => write!(f, "Person[name={}, age={}]", p.name, p.age),
            Self::Animal(a) => write!(f, "Animal[name={}, legs={}]", a.name, a.legs),
            Self::Plant(p) => write!(f, "Plant[name={}, height={}]", p.name, p.height),
        }
    }
}

#[must_use]
pub fn person(name: &str, age: u32) -> TestData {
    TestData::Person(Person {
        name: name.to_string(),
        age,
    })
}

#[must_use]
pub fn animal(name: &str, legs: u32) -> TestData {
    TestData::Animal(Animal {
        name: name.to_string(),
        legs,
    })
}

#[must_use]
pub fn plant(name: &str, height: u32) -> TestData {
    TestData::Plant(Plant {
        name: name.to_string(),
        height,
    })
}

#[must_use]
pub fn person_alice() -> TestData {
    person("Alice", 25)
}

#[must_use]
pub fn person_bob() -> TestData {
    person("Bob", 30)
}

#[must_use]
pub fn person_charlie() -> TestData {
    person("Charlie", 35)
}

#[must_use]
pub fn person_diane() -> TestData {
    person("Diane", 40)
}

#[must_use]
pub fn animal_dog() -> TestData {
    animal("Dog", 4)
}

#[must_use]
pub fn animal_spider() -> TestData {
    animal("Spider", 8)
}

#[must_use]
pub fn plant_rose() -> TestData {
    plant("Rose", 15)
}

#[must_use]
pub fn plant_sunflower() -> TestData {
    plant("Sunflower", 180)
}
