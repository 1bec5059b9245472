use super::{Val, STACK_DEPTH};

/// ## Operand stack
///
/// X plus four backing slots. Every slot always exists and may hold
/// `Empty`. Pushing into a full stack silently drops the deepest
/// slot, the way the calculator's stack always has.
///
/// Any replacement of X that destroys it first copies X into the
/// last-X register.
#[derive(Debug, Clone, Default)]
pub struct OperandStack {
    slots: [Val; STACK_DEPTH],
    last_x: Val,
}

impl OperandStack {
    pub fn new() -> OperandStack {
        OperandStack::default()
    }

    pub fn x(&self) -> Val {
        self.slots[0]
    }

    pub fn y(&self) -> Val {
        self.slots[1]
    }

    pub fn peek(&self, depth: usize) -> Option<Val> {
        self.slots.get(depth).copied()
    }

    pub fn last_x(&self) -> Val {
        self.last_x
    }

    pub fn save_last_x(&mut self) {
        self.last_x = self.slots[0];
    }

    pub fn push(&mut self, val: Val) {
        self.slots.rotate_right(1);
        self.slots[0] = val;
    }

    pub fn pop(&mut self) -> Val {
        let x = self.slots[0];
        self.slots.rotate_left(1);
        self.slots[STACK_DEPTH - 1] = Val::Empty;
        x
    }

    /// Destructive replacement of X.
    pub fn set_x(&mut self, val: Val) {
        self.save_last_x();
        self.slots[0] = val;
    }

    /// X goes to the deepest slot, everything else moves one down.
    pub fn rotate_down(&mut self) {
        self.slots.rotate_left(1);
    }

    /// The deepest slot becomes X.
    pub fn rotate_up(&mut self) {
        self.slots.rotate_right(1);
    }

    pub fn exchange_xy(&mut self) {
        self.save_last_x();
        self.slots.swap(0, 1);
    }

    pub fn recall_last_x(&mut self) {
        let last = self.last_x;
        self.push(last);
    }

    pub fn clear(&mut self) {
        *self = OperandStack::default();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Val> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(n: i64) -> OperandStack {
        let mut s = OperandStack::new();
        for i in 1..=n {
            s.push(Val::Integer(i));
        }
        s
    }

    #[test]
    fn test_sixth_push_drops_deepest() {
        let s = filled(6);
        let v: Vec<Val> = s.iter().copied().collect();
        assert_eq!(
            v,
            vec![
                Val::Integer(6),
                Val::Integer(5),
                Val::Integer(4),
                Val::Integer(3),
                Val::Integer(2)
            ]
        );
    }

    #[test]
    fn test_pop_on_empty_is_empty() {
        let mut s = OperandStack::new();
        assert_eq!(s.pop(), Val::Empty);
        let mut s = filled(1);
        assert_eq!(s.pop(), Val::Integer(1));
        assert_eq!(s.pop(), Val::Empty);
    }

    #[test]
    fn test_pop_fills_deepest_with_empty() {
        let mut s = filled(5);
        s.pop();
        assert_eq!(s.peek(4), Some(Val::Empty));
        assert_eq!(s.peek(3), Some(Val::Integer(1)));
        assert_eq!(s.peek(5), None);
    }

    #[test]
    fn test_last_x_after_replacement() {
        let mut s = filled(2);
        s.set_x(Val::Real(0.5));
        assert_eq!(s.last_x(), Val::Integer(2));
        s.recall_last_x();
        assert_eq!(s.x(), Val::Integer(2));
        assert_eq!(s.y(), Val::Real(0.5));
    }

    #[test]
    fn test_rotations_are_inverse() {
        let mut s = filled(5);
        s.rotate_down();
        assert_eq!(s.x(), Val::Integer(4));
        assert_eq!(s.peek(4), Some(Val::Integer(5)));
        s.rotate_up();
        assert_eq!(s.x(), Val::Integer(5));
    }

    #[test]
    fn test_exchange() {
        let mut s = filled(2);
        s.exchange_xy();
        assert_eq!(s.x(), Val::Integer(1));
        assert_eq!(s.y(), Val::Integer(2));
        assert_eq!(s.last_x(), Val::Integer(2));
    }

    #[test]
    fn test_clear() {
        let mut s = filled(3);
        s.set_x(Val::Integer(9));
        s.clear();
        assert!(s.iter().all(|v| v.is_empty()));
        assert!(s.last_x().is_empty());
    }
}
