use services::ContactForm;

fn main() -> std::io::Result<()> {
    let schema = graphql::build_schema(ContactForm::new());
    // Print the schema in SDL format
    println!("{}", &schema.sdl());
    Ok(())
}
