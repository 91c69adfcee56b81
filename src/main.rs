use std::process;

use log::{debug, info};

use owned_list::discount::{DiscountCalculator, DiscountStrategy};
use owned_list::list::{AllocationError, LinkedList};

fn main() {
    env_logger::init();

    // 分配失败一路传到这里，要不要放弃是外面这层的事，核心只管上报
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn run() -> Result<(), AllocationError> {
    println!("--- 单链表 ---");

    let mut list = LinkedList::new();
    for value in [10, 20, 30] {
        list.prepend(value)?;
        debug!("prepended {}, len = {}", value, list.len());
    }

    println!("{}", list);

    info!("releasing {} nodes", list.len());
    list.clear();
    println!("{}", list);

    println!("--- 折扣计算 ---");

    let prices = [100.0, 250.0, 50.0];
    let total: f64 = prices.iter().sum();
    println!("合计: {}", total);

    let mut calculator = DiscountCalculator::new(DiscountStrategy::FixedRate(0.10));
    println!("九折后: {}", calculator.final_price(&prices));

    calculator.set_strategy(DiscountStrategy::Threshold {
        threshold: 300.0,
        deduction: 50.0,
    });
    println!("满300减50后: {}", calculator.final_price(&prices));

    Ok(())
}
