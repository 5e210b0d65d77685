//! 链表相关类型定义

use core::ptr;

/// 侵入式双向循环链表节点
///
/// 嵌入到宿主结构体中使用，节点本身不拥有任何内存。初始化后
/// `prev`/`next` 指向自身（自环），挂入链表后构成环。
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct ListNode {
    pub prev: *mut ListNode,
    pub next: *mut ListNode,
}

impl ListNode {
    /// 创建未初始化的节点，链接域为空指针，不能直接参与链表操作
    pub const fn new() -> Self {
        Self {
            prev: ptr::null_mut(),
            next: ptr::null_mut(),
        }
    }

    /// 节点是否处于自环状态（已初始化且未挂入任何链表）
    #[inline]
    pub(crate) unsafe fn is_self_ring(node: *const ListNode) -> bool {
        let node = node.cast_mut();
        unsafe { (*node).next == node && (*node).prev == node }
    }
}

/// 链表头句柄
///
/// 指向链表的第一个节点，空指针是空链表的唯一标志。头指针决定
/// 链表顺序：沿 `next` 从头走访，节点按最近插入在前排列。
#[repr(transparent)]
#[derive(Debug)]
pub struct ListHead {
    pub(crate) first: *mut ListNode,
}

impl ListHead {
    /// 创建空链表头
    pub const fn new() -> Self {
        Self {
            first: ptr::null_mut(),
        }
    }

    /// 重置链表头为空
    #[inline]
    pub fn init(&mut self) {
        self.first = ptr::null_mut();
    }

    /// 链表是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_null()
    }

    /// 链表第一个节点的裸指针，空链表返回空指针
    #[inline]
    pub fn first(&self) -> *mut ListNode {
        self.first
    }
}

/// remove 操作的两种正常结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// 原头节点已摘下
    Removed,
    /// 链表为空，无节点可摘（边界情况，不是错误）
    EmptyList,
}
