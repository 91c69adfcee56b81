// 折扣策略
// 原型是教科书式的策略模式：抽象基类加两个实现，各带一个虚函数
// 策略一共就两种，也没有开放扩展的需求，一个闭集枚举加match就够了
// 运行时换策略就是给字段赋个新值，不需要任何动态派发

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountStrategy {
    /// 按比例打折，0.10表示九折
    FixedRate(f64),
    /// 满threshold减deduction，不到线按原价
    Threshold { threshold: f64, deduction: f64 },
}

impl DiscountStrategy {
    pub fn apply(&self, total: f64) -> f64 {
        match *self {
            DiscountStrategy::FixedRate(rate) => total * (1.0 - rate),
            DiscountStrategy::Threshold { threshold, deduction } => {
                if total >= threshold {
                    total - deduction
                } else {
                    total
                }
            }
        }
    }
}

pub struct DiscountCalculator {
    strategy: DiscountStrategy,
}

impl DiscountCalculator {
    pub fn new(strategy: DiscountStrategy) -> Self {
        DiscountCalculator { strategy }
    }

    pub fn set_strategy(&mut self, strategy: DiscountStrategy) {
        self.strategy = strategy;
    }

    pub fn final_price(&self, prices: &[f64]) -> f64 {
        let total: f64 = prices.iter().sum();
        self.strategy.apply(total)
    }
}
