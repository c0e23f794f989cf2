use std::sync::atomic::{AtomicUsize, Ordering};

/// 派发控制：按顺序发放 0..total 的序号，并统计在途请求数
pub struct Dispatcher {
    total: usize,
    next: AtomicUsize,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl Dispatcher {
    pub fn new(total: usize) -> Self {
        Dispatcher {
            total,
            next: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            peak_in_flight: AtomicUsize::new(0),
        }
    }

    // 领取下一个序号，全部派发完返回None
    pub fn next_index(&self) -> Option<usize> {
        let index = self.next.fetch_add(1, Ordering::SeqCst);
        if index < self.total {
            Some(index)
        } else {
            None
        }
    }

    /// 占用一个在途名额，guard 释放时归还
    pub fn begin(&self) -> InFlightGuard<'_> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        InFlightGuard { dispatcher: self }
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

pub struct InFlightGuard<'a> {
    dispatcher: &'a Dispatcher,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.dispatcher.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_in_order() {
        let dispatcher = Dispatcher::new(3);
        assert_eq!(dispatcher.next_index(), Some(0));
        assert_eq!(dispatcher.next_index(), Some(1));
        assert_eq!(dispatcher.next_index(), Some(2));
        assert_eq!(dispatcher.next_index(), None);
        assert_eq!(dispatcher.next_index(), None);
    }

    #[test]
    fn test_in_flight_tracking() {
        let dispatcher = Dispatcher::new(10);
        {
            let _a = dispatcher.begin();
            let _b = dispatcher.begin();
            assert_eq!(dispatcher.peak_in_flight(), 2);
        }
        // 名额已归还，再占两个峰值仍是 2
        let _c = dispatcher.begin();
        let _d = dispatcher.begin();
        assert_eq!(dispatcher.peak_in_flight(), 2);
        let _e = dispatcher.begin();
        assert_eq!(dispatcher.peak_in_flight(), 3);
    }
}
