//! Tree-walking interpreter for Illi.
//!
//! Statements and expressions are sum types matched exhaustively here; there
//! is no visitor. The global scope lives as long as the [`Interpreter`], so
//! definitions persist across `interpret` calls (one per REPL line).
//!
//! Runtime errors propagate with `?` as [`EvalError`] and are reported once,
//! at the top of `interpret`.

mod scope_guard;

pub use scope_guard::ScopedInterpreter;

use illi_diagnostic::{ErrorGuaranteed, RuntimeErrorSink};
use illi_ir::{Expr, Stmt, Token, VarDecl};
use illi_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{
    evaluate_binary, evaluate_unary, AssignError, Binding, Environment, EvalError,
    EvalErrorKind, EvalResult, Value,
};

/// Executes programs against a persistent environment.
pub struct Interpreter {
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// Interpreter printing through `print_handler`.
    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            print_handler,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Execute `statements` in order.
    ///
    /// Stops at the first runtime error, reports it through `sink` and
    /// returns `Err`. Side effects of earlier statements are kept.
    pub fn interpret(
        &mut self,
        statements: &[Stmt],
        sink: &mut dyn RuntimeErrorSink,
    ) -> Result<(), ErrorGuaranteed> {
        for stmt in statements {
            if let Err(error) = self.execute(stmt) {
                return Err(Self::report(&error, sink));
            }
        }
        Ok(())
    }

    /// Like [`interpret`](Self::interpret), but if the last statement is a
    /// bare expression statement its value is printed.
    pub fn interpret_repl(
        &mut self,
        statements: &[Stmt],
        sink: &mut dyn RuntimeErrorSink,
    ) -> Result<(), ErrorGuaranteed> {
        let Some((Stmt::Expression(last), init)) = statements.split_last() else {
            return self.interpret(statements, sink);
        };

        self.interpret(init, sink)?;
        match self.eval(last) {
            Ok(value) => {
                self.print_handler.println(&value.to_string());
                Ok(())
            }
            Err(error) => Err(Self::report(&error, sink)),
        }
    }

    #[cold]
    fn report(error: &EvalError, sink: &mut dyn RuntimeErrorSink) -> ErrorGuaranteed {
        debug!(
            line = error.token.line,
            lexeme = %error.token.lexeme,
            kind = ?error.kind,
            "runtime error"
        );
        sink.emit_runtime(error.token.line, &error.token.lexeme, &error.kind.to_string())
    }

    /// Execute a single statement.
    pub fn execute(&mut self, stmt: &Stmt) -> EvalResult<()> {
        match stmt {
            Stmt::Expression(expr) => {
                self.eval(expr)?;
            }
            Stmt::Print(expr) => {
                let value = self.eval(expr)?;
                self.print_handler.println(&value.to_string());
            }
            Stmt::Var(decl) => self.execute_var(decl)?,
            Stmt::Vars(decls) => {
                for decl in decls {
                    self.execute_var(decl)?;
                }
            }
            Stmt::Block(body) => self.execute_block(body)?,
        }
        Ok(())
    }

    /// Declare first, then evaluate the initializer, so `var x = x;`
    /// reads the new (uninitialized) `x`.
    fn execute_var(&mut self, decl: &VarDecl) -> EvalResult<()> {
        let name = &decl.name.lexeme;
        self.env.define(name.as_str(), Binding::Uninitialized);

        if let Some(initializer) = &decl.initializer {
            let value = self.eval(initializer)?;
            trace!(name = %name, value = %value, "define");
            self.env.define(name.as_str(), Binding::Initialized(value));
        }
        Ok(())
    }

    /// Run `body` in a child scope. The scope is popped on every exit path.
    fn execute_block(&mut self, body: &[Stmt]) -> EvalResult<()> {
        ensure_sufficient_stack(|| {
            self.with_env_scope(|scoped| {
                trace!(depth = scoped.env.depth(), "enter block");
                body.iter().try_for_each(|stmt| scoped.execute(stmt))
            })
        })
    }

    /// Evaluate an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(expr))
    }

    fn eval_inner(&mut self, expr: &Expr) -> EvalResult {
        match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.eval(inner),
            Expr::Unary {
                op,
                operator,
                operand,
            } => {
                let value = self.eval(operand)?;
                evaluate_unary(&value, *op).map_err(|kind| kind.at(operator))
            }
            Expr::Binary {
                left,
                op,
                operator,
                right,
            } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(left, right, *op).map_err(|kind| kind.at(operator))
            }
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.eval(condition)?.is_truthy() {
                    self.eval(then_branch)
                } else {
                    self.eval(else_branch)
                }
            }
            Expr::Comma { left, right } => {
                self.eval(left)?;
                self.eval(right)
            }
            Expr::Variable { name } => self.lookup_variable(name),
            Expr::Assign { name, value } => {
                let value = self.eval(value)?;
                match self.env.assign(&name.lexeme, value.clone()) {
                    Ok(()) => Ok(value),
                    Err(AssignError::Undefined) => {
                        Err(EvalErrorKind::UndefinedVariable(name.lexeme.clone()).at(name))
                    }
                }
            }
            Expr::Error => Err(EvalErrorKind::MalformedExpression.at(&Token::eof(0))),
        }
    }

    fn lookup_variable(&self, name: &Token) -> EvalResult {
        match self.env.get(&name.lexeme) {
            Some(Binding::Initialized(value)) => Ok(value),
            Some(Binding::Uninitialized) => {
                Err(EvalErrorKind::Uninitialized(name.lexeme.clone()).at(name))
            }
            None => Err(EvalErrorKind::UndefinedVariable(name.lexeme.clone()).at(name)),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
