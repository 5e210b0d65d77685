//! 链表核心操作实现

use core::ptr;

use crate::println_error;

use super::error::{ListError, ListResult};
use super::types::{ListHead, ListNode, RemoveOutcome};

impl ListNode {
    /// 将节点初始化为自环
    ///
    /// 节点必须先初始化才能挂入链表。对已经挂在链表上的节点再次
    /// 调用会破坏原链表，调用者必须先将其摘下。
    ///
    /// # Safety
    ///
    /// `node` 要么为空，要么指向一个存活的 `ListNode`。
    pub unsafe fn initialize(node: *mut ListNode) -> ListResult<()> {
        if node.is_null() {
            return Err(ListError::PtrNull);
        }

        unsafe {
            (*node).prev = node;
            (*node).next = node;
        }

        Ok(())
    }
}

impl ListHead {
    /// 统计链表节点个数
    ///
    /// 沿 `next` 绕环一圈，复杂度 O(n)。环被破坏时不保证终止，
    /// 环的正确性由调用者维护。
    ///
    /// # Safety
    ///
    /// 头指针指向的环上所有节点都必须存活且链接一致。
    pub unsafe fn count_nodes(&self) -> u32 {
        if self.first.is_null() {
            return 0;
        }

        let mut count = 0;
        let mut cur = self.first;
        loop {
            count += 1;
            cur = unsafe { (*cur).next };
            if cur == self.first {
                break;
            }
        }

        count
    }

    /// 头插：`node` 成为新的头节点
    ///
    /// 空链表时 `node` 成为唯一节点；否则拼接到当前头节点之前，
    /// 原头节点退为第二个，原尾节点成为 `node` 的前驱。配合
    /// [`ListHead::remove`] 整体表现为 LIFO。
    ///
    /// # Safety
    ///
    /// `node` 要么为空，要么指向一个存活的 `ListNode`；头指针指向
    /// 的环必须满足链接一致性。`node` 不得已挂在别的链表上。
    pub unsafe fn insert(&mut self, node: *mut ListNode) -> ListResult<()> {
        if node.is_null() {
            println_error!("insert: node is null");
            return Err(ListError::PtrNull);
        }

        if !unsafe { ListNode::is_self_ring(node) } {
            println_error!("insert: node not initialized");
            return Err(ListError::NotInited);
        }

        if self.first.is_null() {
            self.first = node;
            return Ok(());
        }

        // 拼接到当前头节点之前，再把头指针指向新节点
        let head = self.first;
        unsafe {
            (*(*head).prev).next = node;
            (*node).prev = (*head).prev;
            (*node).next = head;
            (*head).prev = node;
        }
        self.first = node;

        Ok(())
    }

    /// 摘下当前头节点并写入 `out`
    ///
    /// 空链表返回 `Ok(EmptyList)`，`out` 保持不变。否则摘下头节点
    /// 写入 `out`，头指针前进到原头节点的 `next`（单节点环摘除后
    /// 链表置空），摘下的节点恢复为自环。
    ///
    /// # Safety
    ///
    /// 头指针指向的环上所有节点都必须存活且链接一致。
    pub unsafe fn remove(&mut self, out: &mut *mut ListNode) -> ListResult<RemoveOutcome> {
        if self.first.is_null() {
            return Ok(RemoveOutcome::EmptyList);
        }

        let head = self.first;
        if unsafe { (*head).next } == head {
            // 单节点环
            self.first = ptr::null_mut();
        } else {
            unsafe {
                (*(*head).prev).next = (*head).next;
                (*(*head).next).prev = (*head).prev;
                self.first = (*head).next;
            }
        }
        *out = head;

        // 摘下的节点恢复为自环（返回值可忽略，head 非空）
        let _ = unsafe { ListNode::initialize(head) };

        Ok(RemoveOutcome::Removed)
    }
}
