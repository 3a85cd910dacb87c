use squarepack::{PackItem, Packer};

fn main() {
    env_logger::init();

    let mut items: Vec<_> = (0..5).map(|i| PackItem::new((128, 128), i)).collect();

    let packer = Packer::new().max_side(256);
    let result = packer.pack(&mut items);

    println!("Pack result: {:#?}", result);
    println!("Items: {:#?}", items);
}
