use textsmith_core::CharacterClass;

fn main() {
    for class in CharacterClass::ALL {
        println!("{:<8} {:<18} {}", class, class.label(), class.characters());
    }
}
